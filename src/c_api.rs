// C ABI for embedding the engine in a native UI host.
// Intents go in as JSON, responses come back as JSON strings owned by Rust;
// hosts release them with `aac_string_free`. Panics never cross the boundary.
use crate::config::AacConfig;
use crate::core::selection::{Intent, Snapshot};
use crate::speech::PendingSpeech;
use crate::AacEngine;
use serde::Serialize;
use std::ffi::{c_char, CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;

/// Opaque handle given to the host.
pub struct AacHandle {
    engine: AacEngine,
    speech: PendingSpeech,
}

#[derive(Serialize)]
struct Response {
    snapshot: Snapshot,
    speak: Option<String>,
    error: Option<String>,
}

fn respond(handle: &AacHandle, error: Option<String>) -> String {
    let response = Response {
        snapshot: handle.engine.snapshot(),
        speak: handle.speech.take(),
        error,
    };
    serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string())
}

fn into_c_string(s: String) -> *mut c_char {
    CString::new(s)
        .map(CString::into_raw)
        .unwrap_or(ptr::null_mut())
}

#[no_mangle]
pub extern "C" fn aac_engine_new() -> *mut AacHandle {
    let result = catch_unwind(|| {
        let config = AacConfig::load_default().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "config unreadable, using defaults");
            AacConfig::default()
        });
        let speech = PendingSpeech::default();
        let engine = AacEngine::from_config(config, Box::new(speech.clone()));
        Box::into_raw(Box::new(AacHandle { engine, speech }))
    });
    result.unwrap_or_else(|_| {
        tracing::error!("panic during engine initialization");
        ptr::null_mut()
    })
}

/// # Safety
/// `handle` must come from `aac_engine_new` and not be used afterwards.
#[no_mangle]
pub unsafe extern "C" fn aac_engine_free(handle: *mut AacHandle) {
    if !handle.is_null() {
        drop(Box::from_raw(handle));
    }
}

/// Applies one JSON intent and returns the JSON response.
///
/// # Safety
/// `handle` must be live and `intent_json` a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn aac_dispatch(handle: *mut AacHandle, intent_json: *const c_char) -> *mut c_char {
    let Some(handle) = handle.as_mut() else {
        return ptr::null_mut();
    };
    if intent_json.is_null() {
        return ptr::null_mut();
    }
    let raw = CStr::from_ptr(intent_json).to_string_lossy().into_owned();
    let result = catch_unwind(AssertUnwindSafe(|| {
        match serde_json::from_str::<Intent>(&raw) {
            Ok(intent) => {
                handle.engine.dispatch(intent);
                respond(handle, None)
            }
            Err(e) => respond(handle, Some(format!("unrecognized intent: {e}"))),
        }
    }));
    match result {
        Ok(json) => into_c_string(json),
        Err(_) => {
            tracing::error!("panic while dispatching intent");
            ptr::null_mut()
        }
    }
}

/// # Safety
/// `handle` must be live.
#[no_mangle]
pub unsafe extern "C" fn aac_snapshot(handle: *mut AacHandle) -> *mut c_char {
    match handle.as_ref() {
        Some(handle) => into_c_string(respond(handle, None)),
        None => ptr::null_mut(),
    }
}

/// Imports a vocabulary file. A rejected file is reported through the
/// snapshot's `import_error` and the response's `error`.
///
/// # Safety
/// `handle` must be live and `bytes` valid for `len` bytes.
#[no_mangle]
pub unsafe extern "C" fn aac_import(handle: *mut AacHandle, bytes: *const u8, len: usize) -> *mut c_char {
    let Some(handle) = handle.as_mut() else {
        return ptr::null_mut();
    };
    let data: &[u8] = if bytes.is_null() {
        &[]
    } else {
        std::slice::from_raw_parts(bytes, len)
    };
    let result = catch_unwind(AssertUnwindSafe(|| {
        let error = handle
            .engine
            .import(data)
            .err()
            .map(|e| e.user_message().to_string());
        respond(handle, error)
    }));
    result.map(into_c_string).unwrap_or(ptr::null_mut())
}

/// Returns the current document as export-ready JSON text.
///
/// # Safety
/// `handle` must be live.
#[no_mangle]
pub unsafe extern "C" fn aac_export(handle: *mut AacHandle) -> *mut c_char {
    match handle.as_ref() {
        Some(handle) => {
            let exported = handle.engine.export();
            into_c_string(String::from_utf8_lossy(&exported.bytes).into_owned())
        }
        None => ptr::null_mut(),
    }
}

/// # Safety
/// `s` must come from one of the functions above and be freed once.
#[no_mangle]
pub unsafe extern "C" fn aac_string_free(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}
