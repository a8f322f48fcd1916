// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! [`Reflect`] implementations for standard library types.
//!
//! Pointer-like types (references, boxes, shared pointers, raw pointers) never
//! expose their target: the classifier only looks at the pointer itself.
//!
//! `dyn Any` reports [`Kind::Interface`] only when `kind()` is called on the
//! trait object directly. A `&dyn Any` cannot become a [`Value`], and every
//! owner of one (`Box`, `&`, `Rc`, `Arc`) reports [`Kind::Pointer`], so the
//! classifier and the validator never see the interface kind from std types.

use crate::kind::Kind;
use crate::reflect::Reflect;
use crate::value::Value;
use std::any::Any;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::marker::PhantomData;
use std::ptr::NonNull;
use std::rc::Rc;
use std::sync::mpsc::{Receiver, Sender, SyncSender};
use std::sync::Arc;

macro_rules! impl_leaf {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn kind(&self) -> Kind {
                    Kind::$kind
                }
            }
        )*
    };
}

impl_leaf! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    char => Char,
    str => String,
    String => String,
    dyn Any => Interface,
    dyn Any + Send => Interface,
    dyn Any + Send + Sync => Interface,
}

// Fixed arrays: the only sequence whose elements are visited.
impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn kind(&self) -> Kind {
        Kind::Array
    }

    fn len(&self) -> usize {
        N
    }

    fn index(&self, index: usize) -> Value<'_> {
        self.get(index).map_or_else(Value::invalid, Value::of)
    }
}

// Growable or unsized sequences.
macro_rules! impl_sequence {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<T: Reflect> Reflect for $ty {
                fn kind(&self) -> Kind {
                    Kind::Slice
                }

                fn len(&self) -> usize {
                    <$ty>::len(self)
                }

                fn index(&self, index: usize) -> Value<'_> {
                    self.get(index).map_or_else(Value::invalid, Value::of)
                }
            }
        )*
    };
}

impl_sequence!([T], Vec<T>, VecDeque<T>);

impl<K, V, S> Reflect for HashMap<K, V, S> {
    fn kind(&self) -> Kind {
        Kind::Map
    }
}

impl<K, V> Reflect for BTreeMap<K, V> {
    fn kind(&self) -> Kind {
        Kind::Map
    }
}

impl<T, S> Reflect for HashSet<T, S> {
    fn kind(&self) -> Kind {
        Kind::Map
    }
}

impl<T> Reflect for BTreeSet<T> {
    fn kind(&self) -> Kind {
        Kind::Map
    }
}

// Typed references and owning pointers.
macro_rules! impl_pointer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<T: ?Sized> Reflect for $ty {
                fn kind(&self) -> Kind {
                    Kind::Pointer
                }
            }
        )*
    };
}

impl_pointer!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

// Raw addresses.
macro_rules! impl_unsafe_pointer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<T: ?Sized> Reflect for $ty {
                fn kind(&self) -> Kind {
                    Kind::UnsafePointer
                }
            }
        )*
    };
}

impl_unsafe_pointer!(*const T, *mut T, NonNull<T>);

impl<T> Reflect for Option<T> {
    fn kind(&self) -> Kind {
        Kind::Enum
    }
}

impl<T, E> Reflect for Result<T, E> {
    fn kind(&self) -> Kind {
        Kind::Enum
    }
}

impl<T> Reflect for Sender<T> {
    fn kind(&self) -> Kind {
        Kind::Chan
    }
}

impl<T> Reflect for SyncSender<T> {
    fn kind(&self) -> Kind {
        Kind::Chan
    }
}

impl<T> Reflect for Receiver<T> {
    fn kind(&self) -> Kind {
        Kind::Chan
    }
}

// Zero-sized marker: a struct without fields.
impl<T: ?Sized> Reflect for PhantomData<T> {
    fn kind(&self) -> Kind {
        Kind::Struct
    }
}

macro_rules! impl_fn_pointer {
    ($($arg:ident),*) => {
        impl<R, $($arg),*> Reflect for fn($($arg),*) -> R {
            fn kind(&self) -> Kind {
                Kind::Func
            }
        }

        impl<R, $($arg),*> Reflect for unsafe fn($($arg),*) -> R {
            fn kind(&self) -> Kind {
                Kind::Func
            }
        }

        impl<R, $($arg),*> Reflect for extern "C" fn($($arg),*) -> R {
            fn kind(&self) -> Kind {
                Kind::Func
            }
        }
    };
}

impl_fn_pointer!();
impl_fn_pointer!(A);
impl_fn_pointer!(A, B);
impl_fn_pointer!(A, B, C);
impl_fn_pointer!(A, B, C, D);
impl_fn_pointer!(A, B, C, D, E);
impl_fn_pointer!(A, B, C, D, E, F);

// Tuples: positional fields, named by index.
macro_rules! impl_tuple {
    ($count:expr; $($idx:tt => $name:ident),*) => {
        impl<$($name: Reflect),*> Reflect for ($($name,)*) {
            fn kind(&self) -> Kind {
                Kind::Tuple
            }

            fn num_fields(&self) -> usize {
                $count
            }

            fn field(&self, index: usize) -> Value<'_> {
                match index {
                    $($idx => Value::of(&self.$idx),)*
                    _ => Value::invalid(),
                }
            }

            fn field_name(&self, index: usize) -> Option<&str> {
                const NAMES: [&str; 12] =
                    ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11"];
                if index < $count {
                    NAMES.get(index).copied()
                } else {
                    None
                }
            }
        }
    };
}

impl Reflect for () {
    fn kind(&self) -> Kind {
        Kind::Tuple
    }
}

impl_tuple!(1; 0 => A);
impl_tuple!(2; 0 => A, 1 => B);
impl_tuple!(3; 0 => A, 1 => B, 2 => C);
impl_tuple!(4; 0 => A, 1 => B, 2 => C, 3 => D);
impl_tuple!(5; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E);
impl_tuple!(6; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F);
impl_tuple!(7; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G);
impl_tuple!(8; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G, 7 => H);
impl_tuple!(9; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G, 7 => H, 8 => I);
impl_tuple!(10; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G, 7 => H, 8 => I, 9 => J);
impl_tuple!(11; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G, 7 => H, 8 => I, 9 => J,
    10 => K);
impl_tuple!(12; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G, 7 => H, 8 => I, 9 => J,
    10 => K, 11 => L);
