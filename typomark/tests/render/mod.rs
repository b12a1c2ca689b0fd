//! End to end rendering tests
//!
//! Markdown source in, keyed output tree out, through the comrak parser.

mod blocks;
mod inlines;
mod keys;
mod kitchensink;
