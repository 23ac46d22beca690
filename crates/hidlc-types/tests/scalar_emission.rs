// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use hidlc_types::{
    EmitConfig, ErrorMode, Formatter, ScalarKind, ScalarType, SerializationCall, StructLayout,
    Type,
};

fn scalar(kind: ScalarKind) -> ScalarType {
    ScalarType::new(kind)
}

#[test]
fn test_alignment_and_size_table() {
    let expected = [
        (ScalarKind::Bool, 1),
        (ScalarKind::OpaquePointer, 8),
        (ScalarKind::Int8, 1),
        (ScalarKind::Uint8, 1),
        (ScalarKind::Int16, 2),
        (ScalarKind::Uint16, 2),
        (ScalarKind::Int32, 4),
        (ScalarKind::Uint32, 4),
        (ScalarKind::Int64, 8),
        (ScalarKind::Uint64, 8),
        (ScalarKind::Float, 4),
        (ScalarKind::Double, 8),
    ];
    for (kind, n) in expected {
        assert_eq!(scalar(kind).alignment_and_size(), (n, n), "{kind:?}");
    }
}

#[test]
fn test_enum_backing_types() {
    for kind in ScalarKind::ALL {
        let expected = !matches!(
            kind,
            ScalarKind::Bool | ScalarKind::OpaquePointer | ScalarKind::Float | ScalarKind::Double
        );
        assert_eq!(scalar(kind).is_valid_enum_backing_type(), expected, "{kind:?}");
    }
}

#[test]
fn test_managed_narrowing_is_preserved() {
    assert_eq!(scalar(ScalarKind::Uint8).managed_type(), "byte");
    assert_eq!(scalar(ScalarKind::Int8).managed_type(), "byte");
    assert_eq!(scalar(ScalarKind::Uint16).managed_type(), "short");
    assert_eq!(scalar(ScalarKind::Uint16).managed_boxed_type(), "Short");
    assert_eq!(scalar(ScalarKind::OpaquePointer).managed_type(), "long");
    assert_eq!(scalar(ScalarKind::Bool).managed_boxed_type(), "Boolean");
}

#[test]
fn test_read_int32_by_value_parcel() {
    let mut out = Formatter::buffer();
    scalar(ScalarKind::Int32)
        .emit_serialization_call(
            &mut out,
            &SerializationCall::read("value", "parcel", ErrorMode::Return),
            &EmitConfig::default(),
        )
        .unwrap();

    let code = out.as_str();
    assert!(code.starts_with("_hidl_err = parcel.readInt32(&value);\n"));
    assert!(code.ends_with("if (_hidl_err != ::android::OK) { return _hidl_err; }\n\n"));
}

#[test]
fn test_write_uint8_distinct_from_int8() {
    let config = EmitConfig::default();
    let call = SerializationCall::write("value", "parcel", ErrorMode::Ignore);

    let mut unsigned = Formatter::buffer();
    scalar(ScalarKind::Uint8)
        .emit_serialization_call(&mut unsigned, &call, &config)
        .unwrap();
    let mut signed = Formatter::buffer();
    scalar(ScalarKind::Int8)
        .emit_serialization_call(&mut signed, &call, &config)
        .unwrap();

    assert!(unsigned.as_str().contains("parcel.writeUint8(value);"));
    assert!(signed.as_str().contains("parcel.writeInt8(value);"));
    assert!(!unsigned.as_str().contains('&'));
    assert_eq!(
        scalar(ScalarKind::Uint8).accessor_suffix(),
        scalar(ScalarKind::Int8).accessor_suffix()
    );
}

#[test]
fn test_field_access_int16() {
    let ty = scalar(ScalarKind::Int16);

    let mut out = Formatter::buffer();
    ty.emit_managed_field_access(&mut out, "blob", "obj.level", "offset + 2", true)
        .unwrap();
    assert_eq!(out.as_str(), "obj.level = blob.getInt16(offset + 2);\n");

    let mut out = Formatter::buffer();
    ty.emit_managed_field_access(&mut out, "blob", "obj.level", "offset + 2", false)
        .unwrap();
    assert_eq!(out.as_str(), "blob.putInt16(offset + 2, obj.level);\n");
}

#[test]
fn test_vts_declarations() {
    let mut out = Formatter::buffer();
    scalar(ScalarKind::Double)
        .emit_test_spec_declaration(&mut out)
        .unwrap();
    assert_eq!(out.as_str(), "type: TYPE_SCALAR\nscalar_type: \"double_t\"\n");

    let boolean = scalar(ScalarKind::Bool);
    let mut out = Formatter::buffer();
    boolean.emit_test_spec_declaration(&mut out).unwrap();
    assert!(out.as_str().contains("scalar_type: \"bool_t\""));
    assert_ne!(boolean.test_spec_name(), boolean.native_type());
}

#[test]
fn test_emission_respects_sink_indentation() {
    let mut out = Formatter::buffer();
    out.indent();
    scalar(ScalarKind::Uint64)
        .emit_serialization_call(
            &mut out,
            &SerializationCall::write("_hidl_out_id", "_hidl_reply", ErrorMode::Break)
                .through_pointer(),
            &EmitConfig::default(),
        )
        .unwrap();
    assert_eq!(
        out.as_str(),
        "    _hidl_err = _hidl_reply->writeUint64(_hidl_out_id);\n    \
         if (_hidl_err != ::android::OK) { break; }\n\n"
    );
}

#[test]
fn test_layout_drives_field_emission() {
    let layout = StructLayout::compute(&[
        ("enabled", Type::scalar(ScalarKind::Bool)),
        ("count", Type::scalar(ScalarKind::Uint32)),
    ])
    .unwrap();
    assert_eq!(layout.size, 8);

    let mut out = Formatter::buffer();
    layout
        .emit_managed_fields(&mut out, "_hidl_blob", "", "0", true)
        .unwrap();
    assert_eq!(
        out.as_str(),
        "enabled = _hidl_blob.getBool(0 + 0);\ncount = _hidl_blob.getInt32(0 + 4);\n"
    );
}
