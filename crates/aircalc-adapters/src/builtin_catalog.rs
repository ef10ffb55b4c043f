//! Built-in price list.
//!
//! Used whenever no catalog file is configured. Prices are in BYN; names are
//! the ones printed on the installer's price sheet, so categorization relies
//! on the Russian keywords.

use aircalc_core::{
    domain::{Catalog, Service, Unit},
    error::CalcResult,
};
use rust_decimal::Decimal;

/// Services of the stock catalog, in display order.
pub fn all_services() -> Vec<Service> {
    vec![
        // Installation
        Service::new(1, "Монтаж кондиционера до 3,5 кВт", Decimal::from(250), Unit::Item),
        Service::new(2, "Монтаж кондиционера до 7 кВт", Decimal::from(320), Unit::Item),
        Service::new(3, "Установка дренажной помпы", Decimal::from(80), Unit::Item),
        Service::new(4, "Демонтаж кондиционера", Decimal::from(90), Unit::Item),
        // Maintenance
        Service::new(5, "Техническое обслуживание сплит-системы", Decimal::from(70), Unit::Item),
        Service::new(6, "Выезд замерщика", Decimal::from(30), Unit::Item),
        // Construction
        Service::new(7, "Дополнительная трасса (медь, изоляция)", Decimal::from(45), Unit::Meter),
        Service::new(8, "Штробление стены под трассу", Decimal::from(25), Unit::Meter),
        Service::new(9, "Бурение отверстия в бетоне", Decimal::from(35), Unit::Item),
        Service::new(10, "Прокладка кабеля питания", Decimal::new(65, 1), Unit::Meter),
        Service::new(11, "Декоративный короб", Decimal::from(12), Unit::Meter),
        // Everything else
        Service::new(12, "Дозаправка фреоном", Decimal::from(40), Unit::Item),
        Service::new(13, "Работа с автовышки", Decimal::from(150), Unit::HeightWork),
        Service::new(14, "Промышленный альпинизм", Decimal::from(120), Unit::HeightWork),
    ]
}

/// The stock catalog, validated.
pub fn default_catalog() -> CalcResult<Catalog> {
    Ok(Catalog::new(all_services())?)
}
