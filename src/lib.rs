//! # TTML Lyrics: A Timing Model Parser and LRC Exporter for Apple Music Style TTML
//!
//! This crate reads TTML (Timed Text Markup Language) lyric files, as used by Apple Music
//! and AMLL, into a strongly typed timing model of content blocks, lines and words. The
//! model can be queried, shifted in time, serialized with `serde`, and exported as basic
//! or word-enhanced LRC.
//!
//! The functions you will use most are:
//! - [`parse_ttml`]: Converts a TTML string into a [`TimingModel`].
//! - [`to_lrc`] / [`generate_lrc`]: Serializes a [`TimingModel`] as LRC text.
//! - [`parse_time`] / [`format_time`]: The time codec used for every timestamp.
//!
//! ## Word Text Reconstruction
//!
//! Spacing and punctuation between words live between the `<span>` elements, not inside
//! them. The parser therefore recovers each word's display text from the line's original
//! markup, so `Line::joined_content` reads exactly as the line is rendered.
//!
//! ## ⚠️ Important: Not a General-Purpose Parser
//!
//! Styling, regions and other subtitle features of TTML are ignored. Background vocals
//! (`ttm:role="x-bg"`) are supported as a single group at the end of a line; other shapes
//! are parsed on a best-effort basis and reported in [`TimingModel::warnings`].
//!
//! ## Examples
//!
//! ```rust
//! use ttml_lyrics::{parse_ttml, to_lrc, Timed};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let ttml_content = r#"<tt xmlns="http://www.w3.org/ns/ttml" itunes:timing="Word">
//!       <body dur="00:01.000">
//!         <div begin="0" end="1.0">
//!           <p begin="0" end="1.0" itunes:key="L1"><span begin="0" end="0.5">Hello</span> <span begin="0.5" end="1.0">world</span></p>
//!         </div>
//!       </body>
//!     </tt>"#;
//!
//!     let mut model = parse_ttml(ttml_content)?;
//!     let line = model.line_by_key("L1").ok_or("missing line")?;
//!     assert_eq!(line.joined_content, "Hello world");
//!     assert_eq!(line.dur(), 1.0);
//!
//!     assert_eq!(
//!         to_lrc(&model, true),
//!         "[00:00.000] <00:00.000> Hello <00:00.500> world <00:01.000> \n[00:01.000] "
//!     );
//!
//!     model.apply_offset(2.0);
//!     assert_eq!(to_lrc(&model, false), "[00:02.000] Hello world\n[00:03.000] ");
//!
//!     Ok(())
//! }
//! ```

mod error;
pub mod generator;
pub mod model;
mod offset;
pub mod parser;
mod query;
pub mod time;

pub use error::TtmlError;
pub use generator::{LrcGenerationOptions, LrcMode, generate_lrc, to_lrc};
pub use model::{
    Agent, ContentBlock, Line, LineContent, Metadata, Timed, TimingModel, TransEntry,
    Translation, Transliteration, Word, WordType,
};
pub use parser::{
    document::{XmlElement, XmlNode},
    parse_ttml,
    tree::{TreeNode, TreeValue},
};
pub use time::{TimeValue, format_time, parse_time};
