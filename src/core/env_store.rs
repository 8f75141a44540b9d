//! 已声明变量集合的构建

use crate::core::dotenv::DotenvParser;
use crate::domain::models::DeclaredVarSet;

/// 把若干 .env 文件内容合并成一个已声明变量集合
///
/// 只关心键是否存在：文件之间的重复键不做冲突检测，先后顺序也无关紧要。
pub struct EnvStore;

impl EnvStore {
    pub fn load<'a, I>(contents: I) -> DeclaredVarSet
    where
        I: IntoIterator<Item = &'a str>,
    {
        contents
            .into_iter()
            .flat_map(DotenvParser::keys)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_across_files() {
        let declared = EnvStore::load(["MY_VAR=123\n", "MY_OTHER_VAR=456\n"]);
        assert_eq!(declared.len(), 2);
        assert!(declared.contains("MY_VAR"));
        assert!(declared.contains("MY_OTHER_VAR"));
    }

    #[test]
    fn test_duplicate_keys_collapse() {
        let declared = EnvStore::load(["A=1\nB=2", "A=3\n# A=4"]);
        assert_eq!(declared.len(), 2);
        assert!(declared.contains("A"));
        assert!(declared.contains("B"));
    }

    #[test]
    fn test_empty_and_malformed_files() {
        let declared = EnvStore::load(["", "garbage line\n\n", "OK="]);
        assert_eq!(declared.len(), 1);
        assert!(declared.contains("OK"));
    }

    #[test]
    fn test_no_files() {
        let declared = EnvStore::load(std::iter::empty::<&str>());
        assert!(declared.is_empty());
    }
}
