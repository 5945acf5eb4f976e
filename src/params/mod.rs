//! Request parameters populated from plain data types.
//!
//! A type opts in by implementing [`ParamSource`] with a static list of
//! `(external name, accessor)` pairs. Accessors return `None` to leave a
//! parameter out.
//!
//! ```
//! use redirect_resolver::params::{IntoParamValue, ParamField, ParamSource};
//!
//! struct Search {
//!     query: String,
//!     exact: bool,
//!     page: Option<u32>,
//! }
//!
//! impl ParamSource for Search {
//!     fn param_fields() -> Vec<ParamField<Self>> {
//!         vec![
//!             ParamField::new("q", |s: &Search| s.query.as_str().into_param_value()),
//!             ParamField::new("exact", |s: &Search| s.exact.into_param_value()),
//!             ParamField::new("page", |s: &Search| s.page.into_param_value()),
//!         ]
//!     }
//! }
//! ```

mod value;

pub use value::{IntoParamValue, ParamValue, PARAM_DATETIME_FORMAT};

use crate::fetch::Request;

/// A named parameter and the function reading it from `T`.
pub struct ParamField<T> {
    name: &'static str,
    accessor: fn(&T) -> Option<ParamValue>,
}

impl<T> ParamField<T> {
    pub fn new(name: &'static str, accessor: fn(&T) -> Option<ParamValue>) -> Self {
        Self { name, accessor }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn read(&self, source: &T) -> Option<ParamValue> {
        (self.accessor)(source)
    }
}

/// Types whose fields map to request parameters.
pub trait ParamSource {
    /// Parameter fields in the order they are sent.
    fn param_fields() -> Vec<ParamField<Self>>
    where
        Self: Sized;
}

/// Reads every present field of `source` as a normalised `(name, value)` pair.
pub fn collect_params<S: ParamSource>(source: &S) -> Vec<(String, String)> {
    S::param_fields()
        .iter()
        .filter_map(|field| {
            field
                .read(source)
                .map(|value| (field.name().to_string(), value.normalize()))
        })
        .collect()
}

impl Request {
    /// Appends the parameters declared by `source`, skipping absent fields.
    pub fn add_params_from<S: ParamSource>(&mut self, source: &S) -> &mut Self {
        for (name, value) in collect_params(source) {
            self.add_param(name, value);
        }
        self
    }
}
