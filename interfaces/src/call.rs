use civic_types::{Address, CallContext};

use crate::ExternalError;

/// A contract the consensus gate can execute calls against.
///
/// `ctx.caller` is the gate's own address when the gate dispatches.
pub trait CallTarget {
    fn address(&self) -> Address;
    fn dispatch(&mut self, ctx: &CallContext, call_data: &[u8]) -> Result<(), ExternalError>;
}
