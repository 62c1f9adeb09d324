use rustpython_parser::ast::{Located, Location};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Range {
    pub location: Location,
    pub end_location: Location,
}

impl Range {
    pub fn new(location: Location, end_location: Location) -> Self {
        Range {
            location,
            end_location,
        }
    }

    pub fn from_located<T>(located: &Located<T>) -> Self {
        Range {
            location: located.location,
            end_location: located.end_location.unwrap(),
        }
    }

    /// The range used for checks attached to the module itself.
    pub fn module() -> Self {
        Range {
            location: Location::new(1, 0),
            end_location: Location::new(1, 0),
        }
    }
}
