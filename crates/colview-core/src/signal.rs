// ABOUTME: Subscription registry mapping signal keys to handlers.
// ABOUTME: Handlers run by descending priority; ties keep bind order.

/// Handle returned by `bind`, used to release the subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Priority used when a subscriber has no ordering requirement
pub const DEFAULT_PRIORITY: f32 = 0.5;

#[derive(Debug)]
struct Binding<H> {
    id: SubscriptionId,
    key: String,
    priority: f32,
    handler: H,
}

#[derive(Debug)]
pub struct SignalDispatcher<H> {
    bindings: Vec<Binding<H>>,
    next_id: u64,
}

impl<H: Clone> SignalDispatcher<H> {
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
            next_id: 0,
        }
    }

    pub fn bind(&mut self, key: impl Into<String>, handler: H, priority: f32) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.bindings.push(Binding {
            id,
            key: key.into(),
            priority,
            handler,
        });
        id
    }

    /// Release a subscription, returns false if it was already gone
    pub fn unbind(&mut self, id: SubscriptionId) -> bool {
        let before = self.bindings.len();
        self.bindings.retain(|b| b.id != id);
        self.bindings.len() != before
    }

    /// Handlers bound to `key`, highest priority first
    pub fn handlers(&self, key: &str) -> Vec<H> {
        let mut matching: Vec<&Binding<H>> =
            self.bindings.iter().filter(|b| b.key == key).collect();
        // stable sort keeps bind order for equal priorities
        matching.sort_by(|a, b| b.priority.total_cmp(&a.priority));
        matching.into_iter().map(|b| b.handler.clone()).collect()
    }

    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<H: Clone> Default for SignalDispatcher<H> {
    fn default() -> Self {
        Self::new()
    }
}
