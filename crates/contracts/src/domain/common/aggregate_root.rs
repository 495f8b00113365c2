/// Трейт для корня агрегата
///
/// Определяет отображаемое имя записи и метаданные класса агрегата
pub trait AggregateRoot {
    /// Получить отображаемое название записи
    fn label(&self) -> &str;

    // ============================================================================
    // Метаданные класса агрегата (статические данные)
    // ============================================================================

    /// Индекс агрегата в системе (например, "a001")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции для БД (например, "store")
    fn collection_name() -> &'static str;

    /// Имя элемента для сообщений (единственное число)
    fn element_name() -> &'static str;

    /// Полное имя агрегата, совпадает с именем таблицы (например, "a001_store")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
