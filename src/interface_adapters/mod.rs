// Interface adapters: input decoding, draw-data composition, and frame output.

pub mod input;
pub mod protocol;
pub mod render;
pub mod sink;
