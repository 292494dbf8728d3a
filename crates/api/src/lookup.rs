/// Maps the path form of a namespace root (`com/acme`) to a raw location
/// descriptor.
///
/// Archive-backed roots answer with `file:<archive>!/<entry>`, directory
/// roots with a plain path. `None` means the root exists on no search path.
pub trait ResourceLookup: Send + Sync {
    fn locate(&self, path_form: &str) -> Option<String>;
}

impl<F> ResourceLookup for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn locate(&self, path_form: &str) -> Option<String> {
        self(path_form)
    }
}
