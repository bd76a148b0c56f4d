pub mod heading;
pub mod ramp;

pub use heading::HeadingLevel;
pub use ramp::Ramp;
