// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod transform;

pub use transform::{
    Absent, Convention, Execute, Exposed, Exposure, Extended, Reassemble, Scaled, Standard,
    Transform,
};
