//! Browser-side checks of the JS-facing values.
//!
//! Run with: `wasm-pack test --headless --firefox crates/board-wasm`

#![cfg(target_arch = "wasm32")]

use board_wasm::Chessboard;
use wasm_bindgen::{JsError, JsValue};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn ok<T>(result: Result<T, JsError>) -> T {
    match result {
        Ok(value) => value,
        Err(_) => panic!("bridge call failed"),
    }
}

#[wasm_bindgen_test]
fn occupancy_is_an_array_of_64() {
    let board = Chessboard::new();
    let value = ok(board.occupancy());
    let array = js_sys::Array::from(&value);
    assert_eq!(array.length(), 64);
    assert!(array.get(0).is_null());
    assert!(array.get(1).is_object());
}

#[wasm_bindgen_test]
fn held_piece_is_null_when_idle() {
    let board = Chessboard::new();
    assert!(ok(board.held_piece()).is_null());
}

#[wasm_bindgen_test]
fn vacated_cell_becomes_null() {
    let mut board = Chessboard::new();
    assert!(ok(board.pointer_down(4, 6)));
    assert!(ok(board.held_piece()).is_object());
    assert_eq!(ok(board.pointer_up(4, 4)), "committed");

    let array = js_sys::Array::from(&ok(board.occupancy()));
    assert!(array.get(6 * 8 + 4).is_null());
    assert!(array.get(4 * 8 + 4).is_object());
    assert!(ok(board.held_piece()).is_null());
}

#[wasm_bindgen_test]
fn options_object_is_read() {
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"client".into(), &"black".into()).unwrap();
    js_sys::Reflect::set(&options, &"width".into(), &JsValue::from_f64(400.0)).unwrap();
    let mut board = ok(Chessboard::with_options(options.into()));
    assert_eq!(board.cell_size(), 50.0);
    assert!(!ok(board.pointer_down(4, 6)));
}

#[wasm_bindgen_test]
fn bad_layout_is_rejected() {
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"layout".into(), &"8/8".into()).unwrap();
    assert!(Chessboard::with_options(options.into()).is_err());
}
