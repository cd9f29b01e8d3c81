//! Application Commands

mod generate;

pub use generate::{
    GenerateCommand, GenerateCommandHandler, GenerateOutcome, OUTPUT_SAMPLE_RATE,
};
