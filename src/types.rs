#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

/// Axis-aligned rectangle in screen pixels, used both for placement and collision.
///
/// Odd sizes round the center down, so `from_center` and `center` agree for the
/// even-sized sprites this game uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect { x, y, w, h }
    }

    pub fn from_center(center: Point, (w, h): (i32, i32)) -> Self {
        Rect::new(center.x - w / 2, center.y - h / 2, w, h)
    }

    pub fn from_midbottom(midbottom: Point, (w, h): (i32, i32)) -> Self {
        Rect::new(midbottom.x - w / 2, midbottom.y - h, w, h)
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    pub fn midtop(&self) -> Point {
        Point::new(self.x + self.w / 2, self.top())
    }

    pub fn midbottom(&self) -> Point {
        Point::new(self.x + self.w / 2, self.bottom())
    }

    pub fn size(&self) -> (i32, i32) {
        (self.w, self.h)
    }

    /// True when the two rectangles share interior area. Touching edges do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Half-open point test: the right and bottom edges are outside.
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.left() && point.x < self.right() && point.y >= self.top() && point.y < self.bottom()
    }
}

pub fn wrap_offset(value: i32, max: i32) -> i32 {
    if value >= max { 0 } else { value }
}
