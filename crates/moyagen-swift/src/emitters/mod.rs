pub mod api;
pub mod models;
pub mod server;
pub mod utils;

/// Prefix on every generated Swift file.
pub const FILE_PREFIX: &str = "\
// swiftformat:disable all
// swiftlint:disable all
// Generated file

import Foundation
";
