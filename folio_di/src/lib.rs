#[cfg(test)]
extern crate self as folio_di;

pub use folio_di_derive::Build;
pub use typemap::TypeMap;

mod macros;
mod typemap;

pub trait Provider: Sized {
    fn cache(&mut self) -> &mut TypeMap;
}

#[diagnostic::on_unimplemented(
    message = "The type `{Self}` cannot be built using the provider `{P}`",
    note = "Add `{Self}` to the provider `{P}` or implement `Build` for `{Self}` and make sure \
            all dependencies are satisfied"
)]
pub trait Build<P: Provider>: Clone + 'static {
    fn build(provider: &mut P) -> Self;
}

pub trait Provide: Provider {
    fn provide<T: Build<Self>>(&mut self) -> T {
        T::build(self)
    }
}

impl<P: Provider> Provide for P {}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use super::*;

    #[derive(Debug, Clone)]
    struct Greeting(&'static str);

    #[derive(Debug, Clone, Build)]
    struct Greeter {
        greeting: Greeting,
        #[state]
        calls: Arc<AtomicUsize>,
    }

    #[derive(Debug, Clone, Build)]
    struct App<G> {
        first: G,
        second: G,
    }

    provider! {
        TestProvider {
            greeting: Greeting,
        }
    }

    #[test]
    fn provide() {
        let mut provider = TestProvider {
            _cache: Default::default(),
            greeting: Greeting("hello"),
        };

        let app: App<Greeter> = provider.provide();

        assert_eq!(app.first.greeting.0, "hello");
        app.first.calls.fetch_add(1, Ordering::Relaxed);
        assert_eq!(app.second.calls.load(Ordering::Relaxed), 1);
    }
}
