//! Expression grammar.
//!
//! There is no precedence table. An operator takes whatever was parsed
//! before it as its left operand and parses the rest of the element as its
//! right operand, so `1 + 2 * 3` is `1 + (2 * 3)` and `2 * 3 + 1` is
//! `2 * (3 + 1)`.

use crate::context::Context;
use crate::{ParseError, ParseErrorKind, Parser, SyntaxError};
use cell_ir::{snapshot, BinaryOp, Expr, Name, Span, Token, TokenKind};
use cell_lexer::LexError;
use cell_stack::ensure_sufficient_stack;
use tracing::trace;

type ParseResult<T> = Result<T, SyntaxError>;

impl<I: Iterator<Item = Result<Token, LexError>>> Parser<'_, I> {
    /// Parse the rest of one element of `ctx`, given the expression already
    /// built to its left.
    ///
    /// Returns `None` for an empty element (`;;`, `f(,)`).
    pub(crate) fn expression(
        &mut self,
        ctx: &mut Context,
        previous: Option<Expr>,
    ) -> ParseResult<Option<Expr>> {
        ensure_sufficient_stack(|| self.expression_inner(ctx, previous))
    }

    fn expression_inner(
        &mut self,
        ctx: &mut Context,
        previous: Option<Expr>,
    ) -> ParseResult<Option<Expr>> {
        let Some(token) = self.cursor.advance()? else {
            return Err(error(
                ParseErrorKind::UnexpectedEof {
                    expected: ctx.terminator,
                },
                self.cursor.end_span(),
            ));
        };
        trace!(kind = %token.kind, text = %token.text, "expression");

        if token.kind == ctx.separator {
            if ctx.separator != ctx.terminator && self.cursor.eat(ctx.terminator)? {
                ctx.finished = true;
            }
            return Ok(previous);
        }
        if token.kind == ctx.terminator {
            ctx.finished = true;
            return Ok(previous);
        }

        match token.kind {
            TokenKind::Number | TokenKind::Symbol | TokenKind::String => {
                if previous.is_some() {
                    return Err(error(
                        ParseErrorKind::UnexpectedValue {
                            kind: token.kind,
                            text: token.text,
                        },
                        token.span,
                    ));
                }
                let leaf = match token.kind {
                    TokenKind::Number => Expr::Number(token.text),
                    TokenKind::String => Expr::String(token.text),
                    _ => Expr::Symbol(self.interner.intern(&token.text)),
                };
                self.expression(ctx, Some(leaf))
            }
            TokenKind::Operation => {
                let op = BinaryOp::from_symbol(&token.text).ok_or_else(|| {
                    error(
                        ParseErrorKind::UnexpectedValue {
                            kind: token.kind,
                            text: token.text.clone(),
                        },
                        token.span,
                    )
                })?;
                let Some(lhs) = previous else {
                    return Err(error(ParseErrorKind::MissingLeftOperand { op }, token.span));
                };
                let Some(rhs) = self.expression(ctx, None)? else {
                    return Err(error(ParseErrorKind::MissingRightOperand { op }, token.span));
                };
                Ok(Some(Expr::operation(op, lhs, rhs)))
            }
            TokenKind::Equals => {
                let Some(Expr::Symbol(target)) = previous else {
                    return Err(error(ParseErrorKind::AssignToNonSymbol, token.span));
                };
                let Some(value) = self.expression(ctx, None)? else {
                    let name = self.interner.lookup(target).to_string();
                    return Err(
                        error(ParseErrorKind::MissingAssignedValue { name }, token.span)
                    );
                };
                Ok(Some(Expr::assignment(target, value)))
            }
            TokenKind::LParen => {
                let Some(callee) = previous else {
                    return Err(unexpected(&token, ctx));
                };
                let args = self.multiple(Context::arguments())?;
                self.expression(ctx, Some(Expr::call(callee, args)))
            }
            TokenKind::LBrace => {
                if previous.is_some() {
                    return Err(unexpected(&token, ctx));
                }
                let function = self.function()?;
                self.expression(ctx, Some(function))
            }
            TokenKind::RParen
            | TokenKind::RBrace
            | TokenKind::Comma
            | TokenKind::Semicolon
            | TokenKind::Colon => Err(unexpected(&token, ctx)),
        }
    }

    /// Parse elements until `ctx`'s terminator, dropping empty ones.
    pub(crate) fn multiple(&mut self, mut ctx: Context) -> ParseResult<Vec<Expr>> {
        let mut items = Vec::new();
        while !ctx.finished {
            if let Some(item) = self.expression(&mut ctx, None)? {
                items.push(item);
            }
        }
        Ok(items)
    }

    /// Parse a function literal after its `{`.
    fn function(&mut self) -> ParseResult<Expr> {
        let params = if self.cursor.eat(TokenKind::Colon)? {
            self.parameters()?
        } else {
            Vec::new()
        };
        let body = self.multiple(Context::body())?;
        Ok(Expr::function(params, body))
    }

    /// Parse `(a, b, ...)` after a function's `:`.
    fn parameters(&mut self) -> ParseResult<Vec<Name>> {
        let open = match self.cursor.advance()? {
            Some(token) if token.kind == TokenKind::LParen => token.span,
            Some(token) => {
                return Err(error(ParseErrorKind::ColonWithoutParams, token.span));
            }
            None => {
                return Err(error(
                    ParseErrorKind::UnexpectedEof {
                        expected: TokenKind::LParen,
                    },
                    self.cursor.end_span(),
                ));
            }
        };

        let params = self.multiple(Context::arguments())?;
        params
            .into_iter()
            .map(|param| match param {
                Expr::Symbol(name) => Ok(name),
                other => Err(error(
                    ParseErrorKind::NonSymbolParameter {
                        found: snapshot(&other, self.interner),
                    },
                    open.merge(self.cursor.end_span()),
                )),
            })
            .collect()
    }
}

fn error(kind: ParseErrorKind, span: Span) -> SyntaxError {
    SyntaxError::Parsing(ParseError::new(kind, span))
}

fn unexpected(token: &Token, ctx: &Context) -> SyntaxError {
    error(
        ParseErrorKind::UnexpectedToken {
            found: token.kind,
            expected: ctx.terminator,
        },
        token.span,
    )
}
