/// Implements `PartialEq` between a deque and a slice-like type by comparing the deque's logical
/// window with the other side as slices.
macro_rules! __impl_slice_eq {
    ([$($vars:tt)*] $lhs:ty, $rhs:ty, $($constraints:tt)*) => {
        impl<T, U, $($vars)*> PartialEq<$rhs> for $lhs
        where
            T: PartialEq<U>,
            $($constraints)*
        {
            fn eq(&self, other: &$rhs) -> bool {
                self.as_slice()[..] == other[..]
            }
        }
    };
}
