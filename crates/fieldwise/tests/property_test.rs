//! Property tests: value fidelity and idempotence of the mapping call.

mod common;

use common::{Person, PersonDto};
use fieldwise::Mapper;
use proptest::prelude::*;

proptest! {
    #[test]
    fn mapped_fields_equal_their_source_values(id in any::<u64>(), name in ".{0,32}") {
        let mapper = Mapper::new();
        let person = Person::new(id, name.clone(), "classified".into());

        let dto: PersonDto = mapper.map_object(&person).unwrap();
        prop_assert_eq!(dto.id, id);
        prop_assert_eq!(dto.name, name);
    }

    #[test]
    fn mapping_is_idempotent(id in any::<u64>(), name in ".{0,32}") {
        let mapper = Mapper::new();
        let person = Person::new(id, name, "classified".into());

        let first: PersonDto = mapper.map_object(&person).unwrap();
        let second: PersonDto = mapper.map_object(&person).unwrap();
        prop_assert_eq!(first, second);
    }
}
