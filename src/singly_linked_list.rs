use alloc::boxed::Box;

use core::{
    fmt::{self, Debug, Display, Formatter},
    marker::PhantomData,
    ptr::NonNull,
};

pub(crate) type ElementPtr<T> = NonNull<SinglyLinkedListNode<T>>;

/// A singly linked list tracking both ends of the chain.
///
/// `push_front` and `push_back` are O(1); lookup and removal by value walk
/// the chain from the head.
pub struct SinglyLinkedList<T> {
    head: Option<ElementPtr<T>>,
    tail: Option<ElementPtr<T>>,
    len: usize,
}

impl<T> SinglyLinkedList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts an element at the beginning of the list
    pub fn push_front(&mut self, item: T) {
        let mut node = SinglyLinkedListNode::ptr_to_new(item);
        unsafe { node.as_mut().next = self.head };
        self.head = Some(node);
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.len += 1;
    }

    /// Inserts an element at the end of the list
    /// # Examples
    /// ```
    /// use linked_lists::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::new();
    /// list.push_back(1);
    /// list.push_back(2);
    /// assert_eq!(list.to_string(), "[{1}, {2}]");
    /// ```
    pub fn push_back(&mut self, item: T) {
        let node = SinglyLinkedListNode::ptr_to_new(item);
        match self.tail {
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Removes the element at the front of the list and returns it.
    pub fn pop_front(&mut self) -> Option<T> {
        if let Some(node) = self.head {
            self.head = unsafe { node.as_ref().next };
            if self.head.is_none() {
                self.tail = None;
            }
            self.len -= 1;
            Some(unsafe { SinglyLinkedListNode::into_value(node) })
        } else {
            None
        }
    }

    /// Returns the first element, or [`EmptyListError`] if the list is empty.
    ///
    /// Callers that prefer not to handle the error can check [`len`] first.
    ///
    /// [`len`]: SinglyLinkedList::len
    pub fn first(&self) -> Result<&T, EmptyListError> {
        match self.head {
            Some(node) => Ok(unsafe { &node.as_ref().value }),
            None => Err(EmptyListError),
        }
    }

    pub fn last(&self) -> Option<&T> {
        self.tail.map(|node| unsafe { &node.as_ref().value })
    }

    pub fn contains<Q: PartialEq<T> + ?Sized>(&self, item: &Q) -> bool {
        self.iter().any(|s| item.eq(s))
    }

    pub fn get_by<F: Fn(&T) -> bool>(&self, f: F) -> Option<&T> {
        self.iter().find(|v| f(v))
    }

    pub fn get_mut_by<F: Fn(&T) -> bool>(&mut self, f: F) -> Option<&mut T> {
        self.iter_mut().find(|v| f(v))
    }

    /// Removes the first element equal to `item`, returning whether a
    /// removal occurred. Absence is not an error.
    /// # Examples
    /// ```
    /// use linked_lists::SinglyLinkedList;
    /// let mut list: SinglyLinkedList<usize> = (0..4).collect();
    /// assert!(list.remove(&2));
    /// assert!(!list.remove(&9));
    /// assert_eq!(list.len(), 3);
    /// ```
    pub fn remove<Q: PartialEq<T> + ?Sized>(&mut self, item: &Q) -> bool {
        self.remove_by(|v| item.eq(v)).is_some()
    }

    fn remove_by<F: Fn(&T) -> bool>(&mut self, f: F) -> Option<T> {
        let mut prev: Option<ElementPtr<T>> = None;
        let mut current = self.head;
        while let Some(node) = current {
            unsafe {
                if f(&node.as_ref().value) {
                    let next = node.as_ref().next;
                    match prev {
                        Some(mut parent) => parent.as_mut().next = next,
                        None => self.head = next,
                    }
                    // removed the last node, the predecessor is the new tail
                    if next.is_none() {
                        self.tail = prev;
                    }
                    self.len -= 1;
                    return Some(SinglyLinkedListNode::into_value(node));
                }
                prev = Some(node);
                current = node.as_ref().next;
            }
        }
        None
    }

    /// Drops all elements in the list leaving it empty.
    /// # Examples
    /// ```
    /// use linked_lists::SinglyLinkedList;
    /// let mut list: SinglyLinkedList<usize> = (0..10).collect();
    /// assert_eq!(list.len(), 10);
    /// list.clear();
    /// assert!(list.is_empty());
    /// ```
    pub fn clear(&mut self) {
        let mut head = self.head.take();
        self.tail = None;
        self.len = 0;
        while let Some(node) = head {
            unsafe {
                head = node.as_ref().next;
                drop(Box::from_raw(node.as_ptr()));
            }
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            head: self.head,
            marker: PhantomData,
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            head: self.head,
            marker: PhantomData,
        }
    }

    /// Removes elements from the front as the iterator is advanced;
    /// elements that are never yielded stay in the list.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain { list: self }
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
        }
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        let mut head = self.head;
        while let Some(node) = head {
            unsafe {
                head = node.as_ref().next;
                drop(Box::from_raw(node.as_ptr()));
            }
        }
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "SinglyLinkedList {{ length: {}, items: {{", self.len)?;
        let mut iter = self.iter();
        if let Some(elem) = iter.next() {
            write!(f, "{elem:?}")?;
        }
        for elem in iter {
            write!(f, ", {elem:?}")?;
        }
        write!(f, "}} }}")
    }
}

impl<T: Display> Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        let mut iter = self.iter();
        if let Some(elem) = iter.next() {
            write!(f, "{{{elem}}}")?;
        }
        for elem in iter {
            write!(f, ", {{{elem}}}")?;
        }
        write!(f, "]")
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut lst = SinglyLinkedList::new();
        for i in iter.into_iter() {
            lst.push_back(i);
        }
        lst
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for i in iter.into_iter() {
            self.push_back(i);
        }
    }
}

pub use iters::*;
mod iters {
    use super::*;

    impl<T> IntoIterator for SinglyLinkedList<T> {
        type Item = T;
        type IntoIter = IntoIter<T>;
        fn into_iter(self) -> Self::IntoIter {
            IntoIter { list: self }
        }
    }

    pub struct IntoIter<T> {
        pub(crate) list: SinglyLinkedList<T>,
    }

    impl<T> Iterator for IntoIter<T> {
        type Item = T;
        fn next(&mut self) -> Option<Self::Item> {
            self.list.pop_front()
        }
    }

    pub struct Iter<'a, T> {
        pub(crate) head: Option<ElementPtr<T>>,
        pub(crate) marker: PhantomData<&'a SinglyLinkedList<T>>,
    }

    impl<'a, T: 'a> Iterator for Iter<'a, T> {
        type Item = &'a T;
        fn next(&mut self) -> Option<Self::Item> {
            if let Some(s) = self.head {
                unsafe {
                    self.head = s.as_ref().next;
                    Some(&s.as_ref().value)
                }
            } else {
                None
            }
        }
    }

    pub struct IterMut<'a, T> {
        pub(crate) head: Option<ElementPtr<T>>,
        pub(crate) marker: PhantomData<&'a mut SinglyLinkedList<T>>,
    }

    impl<'a, T: 'a> Iterator for IterMut<'a, T> {
        type Item = &'a mut T;
        fn next(&mut self) -> Option<Self::Item> {
            if let Some(mut s) = self.head {
                unsafe {
                    self.head = s.as_ref().next;
                    Some(&mut s.as_mut().value)
                }
            } else {
                None
            }
        }
    }

    pub struct Drain<'a, T> {
        pub(crate) list: &'a mut SinglyLinkedList<T>,
    }

    impl<'a, T> Iterator for Drain<'a, T> {
        type Item = T;
        fn next(&mut self) -> Option<Self::Item> {
            self.list.pop_front()
        }
    }
}

pub(crate) struct SinglyLinkedListNode<T> {
    value: T,
    next: Option<ElementPtr<T>>,
}

impl<T> SinglyLinkedListNode<T> {
    fn ptr_to_new(value: T) -> ElementPtr<T> {
        NonNull::from(Box::leak(Box::new(Self { value, next: None })))
    }

    /// # Safety
    /// `ptr` must have come from `ptr_to_new` and must already be unlinked
    /// from every list.
    unsafe fn into_value(ptr: ElementPtr<T>) -> T {
        Box::from_raw(ptr.as_ptr()).value
    }
}

/// Returned by [`SinglyLinkedList::first`] when the list has no elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyListError;

impl Display for EmptyListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("list is empty")
    }
}

impl core::error::Error for EmptyListError {}
