//! `xstools` is a small modular toolkit for looking up tabulated
//! cross-section data in particle transport codes
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use xstools_format as format;

#[doc(inline)]
pub use xstools_utils as utils;

#[cfg(feature = "attenuation")]
#[cfg_attr(docsrs, doc(cfg(feature = "attenuation")))]
#[doc(inline)]
pub use xstools_attenuation as attenuation;
