use std::env;
use std::io;
use std::path::PathBuf;

use log::LevelFilter;

pub const ASSET_ROOT_ENV: &str = "ASTRO_SHOOTER_ASSETS";
pub const DEFAULT_LOG_FILE: &str = "astro-shooter.log";
pub const DEFAULT_DEBUG_FRAMES: u64 = 600;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub debug: bool,
    pub max_frames: Option<u64>,
    pub seed: Option<u64>,
    pub asset_root: PathBuf,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            debug: false,
            max_frames: None,
            seed: None,
            asset_root: PathBuf::from("."),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    /// Parses process arguments (without the program name), falling back to
    /// `ASTRO_SHOOTER_ASSETS` for the asset root.
    pub fn from_env() -> io::Result<Self> {
        Config::from_args(env::args().skip(1), env::var_os(ASSET_ROOT_ENV).map(PathBuf::from))
    }

    pub fn from_args(args: impl IntoIterator<Item = String>, env_assets: Option<PathBuf>) -> io::Result<Self> {
        let mut config = Config::default();
        if let Some(root) = env_assets {
            config.asset_root = root;
        }

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--debug" => config.debug = true,
                "--verbose" => config.log_level = LevelFilter::Debug,
                "--frames" => config.max_frames = Some(parse_number(&arg, args.next())?),
                "--seed" => config.seed = Some(parse_number(&arg, args.next())?),
                "--assets" => config.asset_root = PathBuf::from(required(&arg, args.next())?),
                "--log" => config.log_file = PathBuf::from(required(&arg, args.next())?),
                other => {
                    return Err(io::Error::new(io::ErrorKind::InvalidInput, format!("unknown option: {}", other)));
                }
            }
        }

        if config.debug && config.max_frames.is_none() {
            config.max_frames = Some(DEFAULT_DEBUG_FRAMES);
        }
        Ok(config)
    }
}

fn required(flag: &str, value: Option<String>) -> io::Result<String> {
    value.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, format!("{} expects a value", flag)))
}

fn parse_number(flag: &str, value: Option<String>) -> io::Result<u64> {
    let value = required(flag, value)?;
    value
        .parse()
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, format!("{} expects a number, got {:?}", flag, value)))
}
