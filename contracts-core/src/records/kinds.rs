//! Fixed vocabularies used by construction objects and contracts.
//!
//! The labels are the exact strings written to the data files.

use strum::{AsRefStr, Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
pub enum ObjectType {
    #[strum(to_string = "Многоквартирный дом")]
    ApartmentBuilding,
    #[strum(to_string = "Торговый центр")]
    ShoppingCenter,
    #[strum(to_string = "Офисное здание")]
    OfficeBuilding,
    #[strum(to_string = "Промышленный объект")]
    IndustrialFacility,
    #[strum(to_string = "Частный дом")]
    PrivateHouse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
pub enum WorkType {
    #[strum(to_string = "Строительство жилого дома")]
    ResidentialConstruction,
    #[strum(to_string = "Отделочные работы")]
    Finishing,
    #[strum(to_string = "Ремонтные работы")]
    Repair,
    #[strum(to_string = "Проектирование")]
    Design,
    #[strum(to_string = "Инженерные системы")]
    EngineeringSystems,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
pub enum ContractStatus {
    #[strum(to_string = "планируется")]
    Planned,
    #[strum(to_string = "в работе")]
    InProgress,
    #[strum(to_string = "завершен")]
    Completed,
    #[strum(to_string = "приостановлен")]
    Suspended,
    #[strum(to_string = "отменен")]
    Cancelled,
}
