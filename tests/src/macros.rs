/// Build an [`Attributes`](pivot::Attributes) set from `column => value`
/// pairs of mixed value types.
#[macro_export]
macro_rules! attrs {
    () => {
        pivot::Attributes::new()
    };
    ( $( $column:expr => $value:expr ),+ $(,)? ) => {{
        let mut attributes = pivot::Attributes::new();
        $( attributes.insert($column, pivot::Value::from($value)); )+
        attributes
    }};
}

#[macro_export]
macro_rules! tests {
    (
        $(
            $( #[$attrs:meta] )*
            $f:ident
        ),+
    ) => {
        mod mem {
            $(
                #[test]
                $( #[$attrs] )*
                fn $f() {
                    let mut test = $crate::PivotTest::new(
                        $crate::db::mem::SetupMem::new()
                    );

                    test.run_test(|setup| async move {
                        super::$f(setup).await;
                    });
                }
            )*
        }
    };
    (
        $(
            $( #[$attrs:meta] )*
            $f:ident,
        )+
    ) => {
        $crate::tests!( $(
            $( #[$attrs] )*
            $f
        ),+ );
    }
}
