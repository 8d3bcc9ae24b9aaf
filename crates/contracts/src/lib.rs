//! Общие типы фронтенда и бэкенда: модель накладной, классификация сроков
//! годности, поиск, данные графиков и контракт HTTP API.

pub mod domain;
pub mod shared;
