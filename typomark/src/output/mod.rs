//! Output side of the renderer: the keyed node tree, the sink protocol and the sequencer.

pub mod nodes;
pub mod sequence;
pub mod sink;

pub use nodes::{Attribute, OutputNode, WidgetKind};
pub use sequence::Sequencer;
pub use sink::{RenderSink, TreeBuilder};
