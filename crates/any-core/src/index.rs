use crate::value::Any;

/// A type usable with [`Any::get`]: `usize` for vectors, string keys for
/// maps and ECMA arrays.
///
/// This trait is sealed.
pub trait Index: private::Sealed {
    #[doc(hidden)]
    fn index_into<'v, 'a>(&self, value: &'v Any<'a>) -> Option<&'v Any<'a>>;
}

impl Index for usize {
    fn index_into<'v, 'a>(&self, value: &'v Any<'a>) -> Option<&'v Any<'a>> {
        match value {
            Any::Vector(list) => list.get(*self),
            _ => None,
        }
    }
}

impl Index for str {
    fn index_into<'v, 'a>(&self, value: &'v Any<'a>) -> Option<&'v Any<'a>> {
        match value {
            Any::Map(map) => map.get(self),
            Any::Ecma(ecma) => ecma.get(self),
            _ => None,
        }
    }
}

impl Index for String {
    fn index_into<'v, 'a>(&self, value: &'v Any<'a>) -> Option<&'v Any<'a>> {
        self.as_str().index_into(value)
    }
}

impl<T> Index for &T
where
    T: ?Sized + Index,
{
    fn index_into<'v, 'a>(&self, value: &'v Any<'a>) -> Option<&'v Any<'a>> {
        (**self).index_into(value)
    }
}

mod private {
    pub trait Sealed {}
    impl Sealed for usize {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl<T> Sealed for &T where T: ?Sized + Sealed {}
}
