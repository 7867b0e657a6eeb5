use std::cell::{
    RefCell, RefMut
};
use std::collections::HashMap;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use tracing::{
    debug,
    warn
};

use super::managererror::ManagerError;
use super::namedobject::NamedTableJsonProp;
use crate::math::lookuptable::dynamicinterpolatingtable::DynamicInterpolatingTable;
use crate::math::lookuptable::tablevalue::TableValue;


pub trait IManager<V> where 
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>>;
    
    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError>;

    fn get(&self, name: &str) -> Result<V, ManagerError> {
        let map = self.map();
        map.get(name).map_or(
            Err(ManagerError::map_elem_not_found(name)), 
            |elem| Ok(elem.clone())
        )
    }

    fn insert_obj_from_json_vec(&self, json_vec: &[serde_json::Value]) -> Result<(), ManagerError> {                
        for j in json_vec.iter() {
            self.insert_obj_from_json(j.clone())?;
        }
        Ok(())
    }

    /// 依字母順序
    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.map().keys().cloned().collect();
        names.sort();
        names
    }
}


/// 具名查表的註冊表，單執行緒使用。
pub struct Manager<T> {
    map_cell: RefCell<HashMap<String, Rc<DynamicInterpolatingTable<T>>>>
}


impl <T> Manager<T> where 
    T: TableValue {
    pub fn new() -> Manager<T> {
        Manager { map_cell: RefCell::new(HashMap::new()) }
    }

    /// Register `table` under `name`, returning the table it replaced.
    pub fn insert(&self, name: String, table: DynamicInterpolatingTable<T>) -> Option<Rc<DynamicInterpolatingTable<T>>> {
        debug!(name = %name, samples = table.len(), "registered lookup table");
        let previous = self.map_cell.borrow_mut().insert(name.clone(), Rc::new(table));
        if previous.is_some() {
            warn!(name = %name, "lookup table name registered twice, keeping the latest");
        }
        previous
    }

    pub fn len(&self) -> usize {
        self.map_cell.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map_cell.borrow().is_empty()
    }
}

impl <T> Default for Manager<T> where 
    T: TableValue {
    fn default() -> Self {
        Manager::new()
    }
}

impl <T> IManager<Rc<DynamicInterpolatingTable<T>>> for Manager<T> where 
    T: TableValue + DeserializeOwned {
    fn map(&self) -> RefMut<'_, HashMap<String, Rc<DynamicInterpolatingTable<T>>>> {
        self.map_cell.borrow_mut()
    }

    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {   
        let prop: NamedTableJsonProp<T> = ManagerError::from_json_or_json_parse_error(json_value)?; 
        let (name, table) = prop.into_table()?;
        self.insert(name, table);
        Ok(())
    }
} 
