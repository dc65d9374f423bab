use std::any::{type_name, Any};

use crate::{fn_path, inject::resolve, InjectError, Injectable, Outputs, TypeInfo, Value};

impl Outputs for () {
    #[inline(always)]
    fn types() -> Vec<TypeInfo> {
        Vec::new()
    }

    #[inline(always)]
    fn into_values(self) -> Vec<Value> {
        Vec::new()
    }
}

macro_rules! outputs_impl_tuples {
    ($( ( $($out:ident),* ), )*) => {
        $(
            impl<$($out),*> Outputs for ($($out,)*)
            where
                $($out: Any + Send + Sync,)*
            {
                fn types() -> Vec<TypeInfo> {
                    vec![$(TypeInfo::of::<$out>()),*]
                }

                #[allow(non_snake_case)]
                fn into_values(self) -> Vec<Value> {
                    let ($($out,)*) = self;
                    vec![$(Value::new($out)),*]
                }
            }
        )*
    };
}

outputs_impl_tuples! {
    (R1),
    (R1, R2),
    (R1, R2, R3),
    (R1, R2, R3, R4),
    (R1, R2, R3, R4, R5),
    (R1, R2, R3, R4, R5, R6),
    (R1, R2, R3, R4, R5, R6, R7),
    (R1, R2, R3, R4, R5, R6, R7, R8),
    (R1, R2, R3, R4, R5, R6, R7, R8, R9),
}

macro_rules! injectable_impl_fns {
    ($( ( $($idx:tt => $param:ident),* ), )*) => {
        $(
            impl<F, Out, $($param),*> Injectable<($($param,)*)> for F
            where
                F: Fn($($param),*) -> Out + Send + Sync + 'static,
                Out: Outputs,
                $($param: Clone + 'static,)*
            {
                type Output = Out;

                fn parameters() -> Vec<TypeInfo> {
                    vec![$(TypeInfo::of::<$param>()),*]
                }

                #[allow(non_snake_case, unused_variables)]
                fn call_injected(&self, providers: &[Value]) -> Result<Out, InjectError> {
                    $(
                        let $param = resolve::<$param>(providers, $idx).ok_or_else(|| {
                            InjectError::MissingProvider {
                                callable: fn_path::<F>(),
                                index: $idx,
                                parameter: type_name::<$param>(),
                            }
                        })?;
                    )*

                    Ok((self)($($param),*))
                }
            }
        )*
    };
}

injectable_impl_fns! {
    (),
    (0 => A1),
    (0 => A1, 1 => A2),
    (0 => A1, 1 => A2, 2 => A3),
    (0 => A1, 1 => A2, 2 => A3, 3 => A4),
    (0 => A1, 1 => A2, 2 => A3, 3 => A4, 4 => A5),
    (0 => A1, 1 => A2, 2 => A3, 3 => A4, 4 => A5, 5 => A6),
    (0 => A1, 1 => A2, 2 => A3, 3 => A4, 4 => A5, 5 => A6, 6 => A7),
    (0 => A1, 1 => A2, 2 => A3, 3 => A4, 4 => A5, 5 => A6, 6 => A7, 7 => A8),
    (0 => A1, 1 => A2, 2 => A3, 3 => A4, 4 => A5, 5 => A6, 6 => A7, 7 => A8, 8 => A9),
}
