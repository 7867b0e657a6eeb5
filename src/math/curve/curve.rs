pub trait Curve<T> {
    fn value(&self, x: T) -> T;

    fn derivative(&self, x: T) -> T;
}
