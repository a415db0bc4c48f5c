use js_sys::{Array, Object, Reflect, Uint8Array};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::error::ImportError;
use super::loader::ensure_sheetjs_loaded;
use super::types::*;

/// JS bindings to the SheetJS global (loaded by [`ensure_sheetjs_loaded`])
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = XLSX, js_name = read, catch)]
    fn xlsx_read(data: &Uint8Array, opts: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = String)]
    fn js_string(value: &JsValue) -> String;
}

fn get(target: &JsValue, key: &str) -> JsValue {
    Reflect::get(target, &JsValue::from_str(key)).unwrap_or(JsValue::UNDEFINED)
}

fn is_missing(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

/// Parsed workbook object returned by `XLSX.read`
pub struct JsWorkbook {
    inner: JsValue,
}

impl WorkbookSource for JsWorkbook {
    type Sheet = JsSheet;

    fn sheet_names(&self) -> Vec<String> {
        let names = get(&self.inner, "SheetNames");
        if !names.is_array() {
            return Vec::new();
        }
        Array::from(&names)
            .iter()
            .filter_map(|n| n.as_string())
            .collect()
    }

    fn sheet(&self, name: &str) -> Option<JsSheet> {
        let sheet = get(&get(&self.inner, "Sheets"), name);
        if is_missing(&sheet) {
            return None;
        }
        let range = get(&sheet, "!ref")
            .as_string()
            .and_then(|r| CellRange::parse(&r));
        Some(JsSheet { inner: sheet, range })
    }
}

pub struct JsSheet {
    inner: JsValue,
    range: Option<CellRange>,
}

impl SheetSource for JsSheet {
    fn first_col(&self) -> u32 {
        self.range.map(|r| r.start_col).unwrap_or(0)
    }

    fn last_row(&self) -> Option<u32> {
        self.range.map(|r| r.end_row)
    }

    fn cell(&self, col: u32, row: u32) -> CellValue {
        let cell = get(&self.inner, &cell_address(col, row));
        if is_missing(&cell) {
            return CellValue::Empty;
        }
        let value = get(&cell, "v");
        if is_missing(&value) {
            CellValue::Empty
        } else if let Some(s) = value.as_string() {
            CellValue::Text(s)
        } else if let Some(n) = value.as_f64() {
            CellValue::Number(n)
        } else if let Some(b) = value.as_bool() {
            CellValue::Bool(b)
        } else {
            CellValue::Text(js_string(&value))
        }
    }
}

/// SheetJS-backed engine; the script URL comes from configuration
#[derive(Debug, Clone)]
pub struct SheetJsEngine {
    script_url: String,
}

impl SheetJsEngine {
    pub fn new(script_url: impl Into<String>) -> Self {
        Self {
            script_url: script_url.into(),
        }
    }
}

impl SpreadsheetEngine for SheetJsEngine {
    type Workbook = JsWorkbook;

    async fn ensure_loaded(&self) -> Result<(), ImportError> {
        ensure_sheetjs_loaded(&self.script_url).await
    }

    fn read(&self, bytes: &[u8]) -> Result<JsWorkbook, ImportError> {
        let data = Uint8Array::from(bytes);
        let opts = Object::new();
        Reflect::set(&opts, &JsValue::from_str("type"), &JsValue::from_str("array"))
            .map_err(|e| ImportError::ParseError(format!("{:?}", e)))?;
        let inner = xlsx_read(&data, &opts).map_err(|e| {
            let message = e
                .dyn_ref::<js_sys::Error>()
                .map(|err| String::from(err.message()))
                .unwrap_or_else(|| js_string(&e));
            ImportError::ParseError(message)
        })?;
        Ok(JsWorkbook { inner })
    }
}

/// File chosen in an `<input type="file">`
#[derive(Debug, Clone)]
pub struct BrowserFile(pub web_sys::File);

impl FileSource for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn size(&self) -> u64 {
        self.0.size() as u64
    }

    async fn bytes(&self) -> Result<Vec<u8>, ImportError> {
        let buffer = JsFuture::from(self.0.array_buffer())
            .await
            .map_err(|e| ImportError::ParseError(format!("erro ao ler o arquivo: {:?}", e)))?;
        Ok(Uint8Array::new(&buffer).to_vec())
    }
}
