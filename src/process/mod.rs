/*!
 * Process Module
 * Process control block for the scheduling simulator
 */

mod record;

pub use record::ProcessRecord;
