/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without risking silent data loss. The tabulator uses
/// them to validate sample counts before computing grid spacing.
pub mod num;
