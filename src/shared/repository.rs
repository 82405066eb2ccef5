use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

/// Type-keyed registry of repository trait objects.
///
/// Handlers look repositories up by the exact type they were registered
/// with, e.g. `manager.get::<Arc<dyn OrderRepository>>()`.
#[derive(Default, Clone)]
pub struct RepositoryManager {
    repos: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl RepositoryManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<T: 'static + Send + Sync>(&mut self, repo: T) {
        self.repos.insert(TypeId::of::<T>(), Arc::new(repo));
    }

    pub fn get<T: 'static + Send + Sync>(&self) -> Option<&T> {
        self.repos
            .get(&TypeId::of::<T>())
            .and_then(|r| r.downcast_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Greeter: Send + Sync {
        fn greet(&self) -> &'static str;
    }

    struct Hello;

    impl Greeter for Hello {
        fn greet(&self) -> &'static str {
            "hello"
        }
    }

    #[test]
    fn test_get_returns_registered_trait_object() {
        let mut manager = RepositoryManager::new();
        manager.register::<Arc<dyn Greeter>>(Arc::new(Hello));

        let greeter = manager.get::<Arc<dyn Greeter>>().unwrap();
        assert_eq!(greeter.greet(), "hello");
        assert!(manager.get::<Arc<Hello>>().is_none());
    }
}
