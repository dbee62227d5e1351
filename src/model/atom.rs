#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub element: String,
    pub position: [f64; 3],
}

impl Atom {
    pub fn new(element: impl Into<String>, position: [f64; 3]) -> Self {
        Self {
            element: element.into(),
            position,
        }
    }

    #[inline]
    pub fn is_hydrogen(&self) -> bool {
        self.element == "H"
    }
}
