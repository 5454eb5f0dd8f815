use num_derive::FromPrimitive;
use solana_program::{
    decode_error::DecodeError,
    msg,
    program_error::{PrintProgramError, ProgramError},
};
use thiserror::Error;

use crate::math::fixed_point::MathError;

#[derive(Error, Debug, Copy, Clone, FromPrimitive, PartialEq)]
pub enum GaussianError {
    #[error("Invalid standard deviation")]
    InvalidStandardDeviation = 0,

    #[error("Invalid mean")]
    InvalidMean = 1,

    #[error("Arithmetic overflow")]
    ArithmeticOverflow = 2,

    #[error("Division by zero")]
    DivisionByZero = 3,
}

impl From<MathError> for GaussianError {
    fn from(e: MathError) -> Self {
        match e {
            MathError::Overflow => GaussianError::ArithmeticOverflow,
            MathError::DivisionByZero => GaussianError::DivisionByZero,
        }
    }
}

impl From<GaussianError> for ProgramError {
    fn from(e: GaussianError) -> Self {
        msg!("Gaussian error: {}", e);
        ProgramError::Custom(e as u32)
    }
}

impl PrintProgramError for GaussianError {
    fn print<E>(&self) {
        msg!("GaussianError: {}", self);
    }
}

impl<T> DecodeError<T> for GaussianError {
    fn type_of() -> &'static str {
        "GaussianError"
    }
}
