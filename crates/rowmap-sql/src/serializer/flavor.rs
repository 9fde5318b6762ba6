use super::Generator;

use rowmap_core::driver::Flavor;

impl Generator {
    pub fn new(flavor: Flavor) -> Generator {
        Generator { flavor }
    }

    pub fn sql_server() -> Generator {
        Generator::new(Flavor::SqlServer)
    }

    pub fn sqlite() -> Generator {
        Generator::new(Flavor::Sqlite)
    }
}
