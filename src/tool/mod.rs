// ABOUTME: Tool module - defines tools, tool specs, registry, and results.
// ABOUTME: Core abstraction for agent capabilities.

mod registry;
mod result;
mod traits;

pub use registry::*;
pub use result::*;
pub use traits::*;
