use std::collections::HashMap;

/// Vendor-id → display-name lookup injected into the aggregation engine.
///
/// Resolution lives here, not in rendering code, so it can be swapped for
/// a fetched table later without touching aggregation logic. Unknown ids
/// degrade to a synthesized label rather than failing.
pub struct VendorDirectory {
    names: HashMap<i64, String>,
}

impl VendorDirectory {
    /// Create an empty directory (every lookup synthesizes a label).
    pub fn new() -> Self {
        Self {
            names: HashMap::new(),
        }
    }

    /// The fixed vendor table the dashboard ships with.
    pub fn with_defaults() -> Self {
        let mut directory = Self::new();
        directory.insert(1, "Telstra");
        directory.insert(2, "Optus");
        directory.insert(3, "AWS");
        directory.insert(5, "Microsoft");
        directory.insert(6, "Dell");
        directory.insert(7, "ConsultCorp");
        directory
    }

    /// Register or replace a vendor name.
    pub fn insert(&mut self, vendor_id: i64, name: impl Into<String>) {
        self.names.insert(vendor_id, name.into());
    }

    /// Resolve a vendor id to its display name, falling back to
    /// `"Unknown Vendor {id}"` for ids not in the table (including the
    /// `-1` sentinel used for expenses with no vendor link).
    #[must_use]
    pub fn name_for(&self, vendor_id: i64) -> String {
        self.names
            .get(&vendor_id)
            .cloned()
            .unwrap_or_else(|| format!("Unknown Vendor {vendor_id}"))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for VendorDirectory {
    fn default() -> Self {
        Self::with_defaults()
    }
}
