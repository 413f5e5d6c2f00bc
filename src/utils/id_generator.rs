use uuid::Uuid;

/// Deterministic trade id generator.
///
/// Ids are UUID v5 values derived from a namespace and a running counter, so two
/// generators sharing a namespace produce the same sequence.
#[derive(Debug, Clone)]
pub struct TradeIdGenerator {
    namespace: Uuid,
    counter: u64,
}

impl TradeIdGenerator {
    /// Create a generator for `namespace`, starting at counter zero
    pub fn new(namespace: Uuid) -> Self {
        Self {
            namespace,
            counter: 0,
        }
    }

    /// Produce the next id
    pub fn next_id(&mut self) -> Uuid {
        let name = self.counter.to_string();
        self.counter += 1;
        Uuid::new_v5(&self.namespace, name.as_bytes())
    }

    /// How many ids have been handed out
    pub fn issued(&self) -> u64 {
        self.counter
    }
}
