/*!
 * Data Structures
 * Small value types shared across the simulator
 */

mod inline_string;

pub use inline_string::InlineString;
