//! User-facing strings (pt-BR).
//!
//! The two registration failure strings differ only by the trailing period:
//! 400 responses get the period, every other failure does not.

pub const LOGIN_FAILED: &str = "Login falhou!";

pub const REGISTER_SUCCEEDED: &str = "Cadastro criado com sucesso!";
pub const REGISTER_REJECTED: &str = "Erro ao criar usuário.";
pub const REGISTER_FAILED: &str = "Erro ao criar usuário";

pub const ENTRY_CREATED: &str = "Entrada criada com sucesso!";
pub const ENTRY_FAILED: &str = "Erro ao criar entrada.";

pub const EXIT_CREATED: &str = "Saída criada com sucesso!";
pub const EXIT_FAILED: &str = "Erro ao criar saída.";

pub const PRODUCT_CREATED: &str = "Produto criado com sucesso!";
pub const PRODUCT_CREATE_FAILED: &str = "Erro ao criar produto.";

pub const PRODUCT_UPDATED: &str = "Produto atualizado com sucesso!";
pub const PRODUCT_UPDATE_FAILED: &str = "Erro ao atualizar produto.";

pub const PRODUCT_DELETED: &str = "Produto excluído com sucesso!";
pub const PRODUCT_DELETE_FAILED: &str = "Erro ao excluir produto.";
