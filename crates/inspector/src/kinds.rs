//! Annotation kinds declared by the inspector's models

use model_metadata::Annotation;

/// The member must have a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Required;

impl Annotation for Required {}

/// Length bounds for text members, both inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringLength {
    pub min: usize,
    pub max: usize,
}

impl Annotation for StringLength {}
