pub mod section;
pub mod surge;

pub use section::{split_sections, RawLine, Section};
pub use surge::{collect_proxy_names, parse_profile, parse_proxy_line, SurgeProfile};
