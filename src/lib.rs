#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod singly_linked_list;

pub use singly_linked_list::{EmptyListError, SinglyLinkedList};
