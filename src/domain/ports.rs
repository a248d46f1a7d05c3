use crate::utils::error::Result;

/// Where the raw dataset bytes come from.
pub trait DatasetSource {
    fn read(&self) -> Result<Vec<u8>>;

    /// Human readable origin, used in logs.
    fn describe(&self) -> String;
}

/// Source of uniformly distributed indices.
pub trait IndexPicker {
    /// Returns an index in `[0, len)`. Callers guarantee `len > 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<P: IndexPicker + ?Sized> IndexPicker for &mut P {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}

impl<P: IndexPicker + ?Sized> IndexPicker for Box<P> {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}

impl<S: DatasetSource + ?Sized> DatasetSource for Box<S> {
    fn read(&self) -> Result<Vec<u8>> {
        (**self).read()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
