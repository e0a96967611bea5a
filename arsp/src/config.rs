//! Export options

/// Default capacity of the buffered writer in front of the output file
pub const DEFAULT_BUFFER_CAPACITY: usize = 64 * 1024;

/// Default Arrow IPC buffer alignment
pub const DEFAULT_IPC_ALIGNMENT: usize = 64;

/// Knobs for a single export call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Capacity of the write buffer in bytes
    pub buffer_capacity: usize,
    /// fsync the temporary file before renaming it into place
    pub sync_on_commit: bool,
    /// Arrow IPC buffer alignment for the columnar format (multiple of 8)
    pub ipc_alignment: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            sync_on_commit: true,
            ipc_alignment: DEFAULT_IPC_ALIGNMENT,
        }
    }
}

impl ExportOptions {
    /// Set write buffer capacity in bytes
    pub fn with_buffer_capacity(mut self, buffer_capacity: usize) -> Self {
        self.buffer_capacity = buffer_capacity;
        self
    }

    /// Enable or disable fsync before commit
    pub fn with_sync_on_commit(mut self, sync_on_commit: bool) -> Self {
        self.sync_on_commit = sync_on_commit;
        self
    }

    /// Set Arrow IPC buffer alignment
    pub fn with_ipc_alignment(mut self, ipc_alignment: usize) -> Self {
        self.ipc_alignment = ipc_alignment;
        self
    }
}
