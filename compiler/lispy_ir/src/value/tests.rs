use super::*;

fn sum_call() -> Value {
    Value::sexpr_from(vec![Value::symbol("+"), Value::number(1), Value::number(2)])
}

mod construction {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn leaves_report_their_kind() {
        assert_eq!(Value::number(3).kind(), ValueKind::Number);
        assert_eq!(Value::error("bad").kind(), ValueKind::Error);
        assert_eq!(Value::symbol("*").kind(), ValueKind::Symbol);
        assert_eq!(Value::sexpr().kind(), ValueKind::SExpr);
        assert_eq!(Value::qexpr().kind(), ValueKind::QExpr);
    }

    #[test]
    fn string_payloads_are_owned_copies() {
        let mut source = String::from("-");
        let symbol = Value::symbol(source.as_str());
        source.push('x');
        assert_eq!(symbol.as_symbol(), Some("-"));
    }

    #[test]
    fn empty_containers_have_no_cells() {
        assert_eq!(Value::sexpr().cells(), Some(&[][..]));
        assert_eq!(Value::qexpr().cell_count(), 0);
        assert_eq!(Value::number(1).cells(), None);
        assert_eq!(Value::number(1).cell_count(), 0);
    }

    #[test]
    fn error_from_payload() {
        let value = Value::from(ErrorValue::new("Division By Zero"));
        assert!(value.is_error());
        assert_eq!(value, Value::error("Division By Zero"));
    }
}

mod cells {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn push_appends_in_order() {
        let mut list = Value::qexpr();
        assert_eq!(list.push(Value::number(1)), Ok(()));
        assert_eq!(list.push(Value::symbol("+")), Ok(()));
        assert_eq!(
            list,
            Value::qexpr_from(vec![Value::number(1), Value::symbol("+")])
        );
    }

    #[test]
    fn push_onto_leaf_is_rejected() {
        let mut leaf = Value::number(1);
        assert_eq!(
            leaf.push(Value::number(2)),
            Err(CellError::NotAList {
                kind: ValueKind::Number
            })
        );
        assert_eq!(leaf, Value::number(1));
    }

    #[test]
    fn pop_shifts_remaining_cells() {
        let mut call = sum_call();
        assert_eq!(call.pop(0), Ok(Value::symbol("+")));
        assert_eq!(
            call,
            Value::sexpr_from(vec![Value::number(1), Value::number(2)])
        );
        assert_eq!(call.pop(1), Ok(Value::number(2)));
        assert_eq!(call.cell_count(), 1);
    }

    #[test]
    fn pop_out_of_range_leaves_container_untouched() {
        let mut call = sum_call();
        assert_eq!(
            call.pop(3),
            Err(CellError::IndexOutOfRange { index: 3, count: 3 })
        );
        assert_eq!(call, sum_call());
    }

    #[test]
    fn pop_from_empty() {
        let mut empty = Value::sexpr();
        assert_eq!(
            empty.pop(0),
            Err(CellError::IndexOutOfRange { index: 0, count: 0 })
        );
    }

    #[test]
    fn take_returns_only_the_cell() {
        assert_eq!(sum_call().take(2), Ok(Value::number(2)));
        assert_eq!(
            Value::symbol("x").take(0),
            Err(CellError::NotAList {
                kind: ValueKind::Symbol
            })
        );
    }

    #[test]
    fn into_cells_works_for_both_list_kinds() {
        assert_eq!(
            Value::qexpr_from(vec![Value::number(4)]).into_cells(),
            Ok(vec![Value::number(4)])
        );
        assert_eq!(sum_call().into_cells().map(|cells| cells.len()), Ok(3));
    }

    #[test]
    fn cell_error_messages() {
        assert_eq!(
            CellError::IndexOutOfRange { index: 5, count: 2 }.to_string(),
            "cell index 5 out of range for 2 cells"
        );
        assert_eq!(
            CellError::NotAList {
                kind: ValueKind::Error
            }
            .to_string(),
            "error value has no cells"
        );
    }
}

mod printing {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn leaves() {
        assert_eq!(Value::number(-17).to_string(), "-17");
        assert_eq!(Value::symbol("/").to_string(), "/");
        assert_eq!(
            Value::error("Division By Zero").to_string(),
            "Error: Division By Zero"
        );
    }

    #[test]
    fn lists_are_space_separated() {
        assert_eq!(sum_call().to_string(), "(+ 1 2)");
        assert_eq!(Value::sexpr().to_string(), "()");
        assert_eq!(Value::qexpr().to_string(), "{}");
    }

    #[test]
    fn nested_lists_keep_their_brackets() {
        let nested = Value::qexpr_from(vec![
            Value::symbol("*"),
            sum_call(),
            Value::qexpr_from(vec![Value::number(0)]),
        ]);
        assert_eq!(nested.to_string(), "{* (+ 1 2) {0}}");
    }

    #[test]
    fn kind_names() {
        assert_eq!(ValueKind::SExpr.to_string(), "s-expression");
        assert_eq!(ValueKind::QExpr.name(), "q-expression");
    }
}

mod deep_trees {
    use super::*;
    use pretty_assertions::assert_eq;

    const DEPTH: usize = 100_000;

    /// Run `f` on a thread with an ordinary 8MB main-thread stack.
    fn on_main_sized_stack<F: FnOnce() + Send + 'static>(f: F) {
        let handle = std::thread::Builder::new()
            .stack_size(8 * 1024 * 1024)
            .spawn(f);
        match handle.map(std::thread::JoinHandle::join) {
            Ok(Ok(())) => {}
            Ok(Err(panic)) => std::panic::resume_unwind(panic),
            Err(error) => panic!("could not spawn test thread: {error}"),
        }
    }

    fn nested_qexpr(depth: usize) -> Value {
        let mut value = Value::qexpr();
        for _ in 0..depth {
            value = Value::qexpr_from(vec![value]);
        }
        value
    }

    #[test]
    fn deep_list_drops() {
        on_main_sized_stack(|| drop(nested_qexpr(DEPTH)));
    }

    #[test]
    fn deep_list_with_leaves_drops() {
        on_main_sized_stack(|| {
            let mut value = Value::number(0);
            for n in 0..DEPTH {
                value = Value::sexpr_from(vec![Value::symbol("+"), value, Value::number(1)]);
                assert_eq!(value.cell_count(), 3, "level {n}");
            }
            drop(value);
        });
    }

    #[test]
    fn deep_list_prints() {
        on_main_sized_stack(|| {
            let printed = nested_qexpr(DEPTH).to_string();
            assert_eq!(printed.len(), 2 * (DEPTH + 1));
            assert!(printed.starts_with("{{{"));
            assert!(printed.ends_with("}}}"));
        });
    }

    #[test]
    fn into_cells_leaves_nothing_behind() {
        let cells = nested_qexpr(3).into_cells();
        assert_eq!(cells.map(|cells| cells[0].to_string()), Ok("{{{}}}".to_string()));
    }
}

#[cfg(feature = "serde")]
mod serialization {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn value_tree_survives_json() {
        let value = Value::qexpr_from(vec![
            sum_call(),
            Value::error("Division By Zero"),
            Value::qexpr(),
        ]);
        let json = match serde_json::to_string(&value) {
            Ok(json) => json,
            Err(error) => panic!("serialize failed: {error}"),
        };
        let back: Value = match serde_json::from_str(&json) {
            Ok(back) => back,
            Err(error) => panic!("deserialize failed on {json}: {error}"),
        };
        assert_eq!(back, value);
    }

    #[test]
    fn operator_and_span_serialize() {
        let encoded = serde_json::to_string(&(crate::Operator::Div, crate::Span::new(1, 4)));
        assert_eq!(
            encoded.ok().as_deref(),
            Some(r#"["Div",{"start":1,"end":4}]"#)
        );
    }
}
