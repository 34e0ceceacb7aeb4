mod investment;

pub use investment::*;
