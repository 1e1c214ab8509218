//! Domain factories for creating entity identifiers.

use uuid::Uuid;

/// Factory for generating entity identifiers.
///
/// Keeps the generation concern out of the entities themselves.
pub struct EntityIdFactory;

impl EntityIdFactory {
    /// Generate a new opaque identifier backed by a random UUID v4.
    pub fn generate() -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_factory_generate() {
        // テスト項目: EntityIdFactory::generate() で UUID v4 形式の ID を生成できる
        // when (操作):
        let oid = EntityIdFactory::generate();

        // then (期待する結果):
        assert_eq!(oid.len(), 36); // UUID v4 の標準長（ハイフン含む）
        assert!(Uuid::parse_str(&oid).is_ok());
    }

    #[test]
    fn test_entity_id_factory_generate_uniqueness() {
        // テスト項目: EntityIdFactory::generate() は毎回異なる ID を生成する
        let oid1 = EntityIdFactory::generate();
        let oid2 = EntityIdFactory::generate();

        assert_ne!(oid1, oid2);
    }
}
