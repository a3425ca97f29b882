pub mod emitters;
pub mod generator;
pub mod swift;
pub mod type_mapper;

pub use generator::SwiftClientGenerator;
