//! Persistence hook for [`ArrayList`].
//!
//! The persisted form holds the capacity and the elements. The version is a
//! transient iteration guard and is not stored: a decoded list starts fresh.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::array_list::ArrayList;
use crate::error::{ListError, ListResult};
use crate::list::{Element, List};
use crate::validate::check_capacity_limit;

#[derive(Serialize)]
struct ListRecord<'a, T> {
    capacity: usize,
    items: &'a [T],
}

#[derive(Deserialize)]
struct OwnedListRecord<T> {
    capacity: usize,
    items: Vec<T>,
}

impl<T: Element + Serialize> Serialize for ArrayList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ListRecord {
            capacity: self.capacity(),
            items: self.as_slice(),
        }
        .serialize(serializer)
    }
}

impl<'de, T: Element + Deserialize<'de>> Deserialize<'de> for ArrayList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = OwnedListRecord::<T>::deserialize(deserializer)?;
        if record.capacity < record.items.len() {
            return Err(D::Error::custom(format_args!(
                "capacity {} is less than the {} stored element(s)",
                record.capacity,
                record.items.len()
            )));
        }
        check_capacity_limit::<T>(record.capacity).map_err(D::Error::custom)?;
        let mut list = ArrayList::from(record.items);
        list.set_capacity(record.capacity).map_err(D::Error::custom)?;
        Ok(list)
    }
}

impl<T: Element + Serialize> ArrayList<T> {
    /// Encodes the list with `postcard`.
    pub fn to_bytes(&self) -> ListResult<Vec<u8>> {
        postcard::to_allocvec(self).map_err(ListError::Codec)
    }
}

impl<T: Element + DeserializeOwned> ArrayList<T> {
    /// Decodes a list produced by [`to_bytes`](Self::to_bytes).
    pub fn from_bytes(bytes: &[u8]) -> ListResult<Self> {
        postcard::from_bytes(bytes).map_err(ListError::Codec)
    }
}
