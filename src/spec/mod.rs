pub use oas3::spec::{Components, ObjectOrReference, Operation, Parameter, PathItem};
pub use oas3::spec::{SecurityRequirement, SecurityScheme};
pub use oas3::OpenApiV3Spec;

mod load;

pub use load::*;
