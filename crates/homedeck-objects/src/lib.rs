#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Domain object model and icon resolution shared by the Homedeck admin UI.
//!
//! Everything in this crate is DOM-free so the resolution rules can be exercised on
//! the native target. The UI crate layers rendering on top of these types.

pub mod icon;
pub mod object;
pub mod svg;

pub use icon::{IconSpec, SymbolicIcon, icon_source, system_icon};
pub use object::{CommonMeta, DomainObject, LocalizedName, ObjectName};
pub use svg::{SvgDecodeError, decode_svg_data_url};
