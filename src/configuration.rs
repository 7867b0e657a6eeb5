use std::cell::{
    RefCell,
    RefMut
};

use serde::Deserialize;

use crate::manager::managererror::ManagerError;
use crate::manager::manager::{
    IManager,
    Manager
};


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    lookup_table: Vec<serde_json::Value>
}

/// 由 JSON 設定建立具名查表。
///
/// ```json
/// { "lookup_table": [ { "name": "gain", "x": [0, 1, 2], "f": [0, 10, 20] } ] }
/// ```
///
/// 只接受記憶體中的字串或 `serde_json::Value`，不讀寫檔案。
pub struct Configuration {
    table_manager_cell: RefCell<Manager<f64>>
}


impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            table_manager_cell: RefCell::new(Manager::new())
        }
    }

    pub fn table_manager(&self) -> RefMut<'_, Manager<f64>> {
        self.table_manager_cell.borrow_mut()
    }

    pub fn from_json_str(&self, json: &str) -> Result<(), ManagerError> {
        let json_value: serde_json::Value = serde_json::from_str(json)?;
        self.from_json_value(json_value)
    }

    pub fn from_json_value(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
        let table_manager = self.table_manager_cell.try_borrow_mut()?;
        table_manager.insert_obj_from_json_vec(&json_prop.lookup_table)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
