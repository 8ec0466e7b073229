mod annotation_inputs;
mod annotation_outputs;
mod settings;

pub use annotation_inputs::{read_annotation_inputs, AnnotationInput};
pub use annotation_outputs::{write_outputs, AnnotationOutput, SerializationFormat};
pub use settings::{read_settings, AnnotationSettings};
